mod app;
mod logging;

use dropcopy::cli;

fn main() {
    let args = cli::parse();
    let code = app::run(args);
    if code != 0 {
        std::process::exit(code);
    }
}
