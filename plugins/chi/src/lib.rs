greeter::export_greeter!("你好宇宙");
