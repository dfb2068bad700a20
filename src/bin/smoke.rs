use anyhow::Result;
use clap::Parser;
use owo_colors::OwoColorize;
use usend::constants::{DEFAULT_HOST, DEFAULT_PORT};
use usend::sender::DatagramSender;

#[derive(Parser, Debug)]
#[command(author, version, about = "Send a sequence of text datagrams to one UDP destination.", long_about = None)]
struct Args {
    /// Destination host name or IP address.
    #[arg(long, value_name = "HOST", default_value = DEFAULT_HOST)]
    host: String,

    /// Destination UDP port.
    #[arg(short, long, value_name = "PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Payloads to send, one datagram each.
    #[arg(value_name = "MESSAGE", default_values_t = ["foo".to_string(), "bar".to_string(), "baz".to_string()])]
    messages: Vec<String>,
}

fn run(args: &Args) -> Result<()> {
    let mut sender = DatagramSender::new(&args.host, args.port)?;
    for message in &args.messages {
        sender.send(message)?;
    }
    sender.close();
    Ok(())
}

fn main() {
    let args = Args::parse();
    if let Err(err) = run(&args) {
        eprintln!("{} {err:#}", "Error:".red());
        std::process::exit(1);
    }
    println!("{}", "Send successfully.".green());
}
