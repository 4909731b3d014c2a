use auditgate::cli::{self, SummaryArgs};

fn main() {
    let result = cli::parse_args::<SummaryArgs>().and_then(|args| {
        cli::init_logging(&args.global);
        cli::summary::handle_summary(&args)
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
