//! wochenbericht main entrypoint.

use wochenbericht::run;
use wochenbericht::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
