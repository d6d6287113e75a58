greeter::export_greeter!("Hello Universe");
