use std::process::ExitCode;

use design_patterns::demo::{launch, Demo};

fn main() -> ExitCode {
    launch(Some(Demo::Builder), None, 0, false)
}
