use greeter::context::AppContext;
use greeter::launcher::EXIT_FAILURE;

fn main() {
    let ctx = match AppContext::from_working_dir() {
        Ok(ctx) => ctx,
        Err(err) => {
            println!("{err}");
            std::process::exit(EXIT_FAILURE);
        }
    };
    let launcher = ctx.into_launcher();
    // Arguments that are not UTF-8 cannot name a language; keep them so the count still matters.
    let args = std::env::args_os()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned());
    let code = launcher.run(args, &mut std::io::stdout().lock());
    std::process::exit(code);
}
