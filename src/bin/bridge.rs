use std::process::ExitCode;

use design_patterns::demo::{launch, Demo};

fn main() -> ExitCode {
    launch(Some(Demo::Bridge), None, 0, false)
}
