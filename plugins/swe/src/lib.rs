greeter::export_greeter!("Hej Universum");
