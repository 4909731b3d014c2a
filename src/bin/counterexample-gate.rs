use auditgate::cli::{self, GateArgs};

fn main() {
    let result = cli::parse_args::<GateArgs>().and_then(|args| {
        cli::init_logging(&args.global);
        cli::gate::handle_gate(&args)
    });

    let exit_code = match result {
        Ok(verdict) => verdict.exit_code(),
        Err(e) => {
            println!("{}", e);
            e.exit_code()
        }
    };
    std::process::exit(exit_code);
}
