//! Program to print random strings.
use randstr::console::app;

fn main() -> anyhow::Result<()> {
    app::run()
}
