//! watercooler main entrypoint.

use watercooler::run;
use watercooler::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
