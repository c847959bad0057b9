use clap::Parser;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = edk::cli::Cli::parse();

    match edk::run(cli).await {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}
