use login_bot_flow::types::{FlowOutcome, FlowReport, FlowStep};
use std::io::{self, Write};
use url::Url;

pub fn print_start(start_url: &Url) {
    println!("1. Starting flow at {start_url}");
}

pub fn print_report(report: &FlowReport) {
    let stdout = io::stdout();
    if let Err(e) = write_report(&mut stdout.lock(), report) {
        eprintln!("failed to write report: {e}");
    }
}

fn write_report(out: &mut impl Write, report: &FlowReport) -> io::Result<()> {
    for record in &report.steps {
        match record.step {
            FlowStep::Start => writeln!(out, "2. Landed at {}", record.landed)?,
            FlowStep::Login => {
                writeln!(out, "   - Detected Login Page. Posting credentials...")?;
                writeln!(out, "3. Post Login ended at: {}", record.landed)?;
            }
            FlowStep::Consent => {
                writeln!(out, "   - Detected Consent Page. Approving...")?;
                writeln!(out, "4. Post Consent ended at: {}", record.landed)?;
            }
            FlowStep::ReadBody => {}
        }
    }

    match &report.outcome {
        FlowOutcome::Success => writeln!(out, "=== SUCCESS: OIDC Flow Completed ==="),
        FlowOutcome::Failure { preview } => {
            writeln!(out, "FAILURE: Did not see success message.")?;
            writeln!(out, "URL: {}", report.landed)?;
            writeln!(out, "Body Preview:")?;
            writeln!(out, "{preview}")
        }
    }
}
