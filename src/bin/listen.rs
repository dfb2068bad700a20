use anyhow::{Context, Result};
use clap::Parser;
use owo_colors::OwoColorize;
use socket2::{Domain, Protocol, Socket, Type};
use std::net::{SocketAddr, UdpSocket};
use usend::constants::{DEFAULT_PORT, MAX_DATAGRAM_SIZE};

#[derive(Parser, Debug)]
#[command(author, version, about = "Print every UDP datagram arriving on one address.", long_about = None)]
struct Args {
    /// Address to listen on.
    #[arg(short, long, value_name = "ADDR", default_value_t = SocketAddr::from(([127, 0, 0, 1], DEFAULT_PORT)))]
    bind: SocketAddr,
}

fn bind_listener(addr: SocketAddr) -> Result<UdpSocket> {
    let domain = match addr {
        SocketAddr::V4(_) => Domain::IPV4,
        SocketAddr::V6(_) => Domain::IPV6,
    };
    let socket = Socket::new(domain, Type::DGRAM, Some(Protocol::UDP))?;
    socket.set_reuse_address(true)?;
    socket.bind(&addr.into())?;
    Ok(socket.into())
}

fn run(args: &Args) -> Result<()> {
    let socket = bind_listener(args.bind)
        .with_context(|| format!("failed to listen on {}", args.bind))?;
    println!("Listening on {}.", args.bind.blue());

    let mut buf = [0u8; MAX_DATAGRAM_SIZE];
    loop {
        let (len, from) = socket.recv_from(&mut buf)?;
        let text = String::from_utf8_lossy(&buf[..len]);
        println!("[{}] {} bytes: {}", from.magenta(), len.yellow(), text);
    }
}

fn main() {
    let args = Args::parse();
    if let Err(err) = run(&args) {
        eprintln!("{} {err:#}", "Error:".red());
        std::process::exit(1);
    }
}
