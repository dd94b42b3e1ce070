fn main() -> anyhow::Result<()> {
    try_parse::tracing_init::init()?;

    println!("enter an integer per line, ctrl-d to finish");

    let stdin = std::io::stdin();
    let summary = try_parse::repl::run(stdin.lock(), std::io::stdout())?;
    println!(
        "{} accepted, {} rejected",
        summary.accepted, summary.rejected
    );

    Ok(())
}
