// Copyright (c) 2022  Mubelotix <mubelotix@gmail.com>
// Program licensed under GNU AGPL v3 or later. See the LICENSE file for details.

use counter::prelude::*;
use std::io::Write;
use structopt::StructOpt;

#[derive(StructOpt, Debug)]
#[structopt(name = "simulation", about = "Runs counter hosts and forwards typed commands to them")]
struct Options {
    /// Number of counter hosts to launch
    #[structopt(short = "n", long, default_value = "5")]
    count: usize,
}

fn prompt(ok: bool) {
    match ok {
        true => print!("\x1b[32m>>> \x1b[0m"),
        false => print!("\x1b[31m>>> \x1b[0m"),
    }
    let _ = std::io::stdout().flush();
}

#[tokio::main]
async fn main() {
    env_logger::init();
    let options = Options::from_args();

    let (reply_sender, reply_receiver) = async_channel::unbounded::<Reply>();
    let mut command_senders = Vec::new();
    for i in 0..options.count {
        let (command_receiver, command_sender) = CommandReceiver::new();
        command_senders.push(command_sender);
        tokio::spawn(run(CounterHost::new(format!("counter-{}", i)), command_receiver, reply_sender.clone()));
    }
    drop(reply_sender);

    tokio::spawn(async move {
        while let Ok(reply) = reply_receiver.recv().await {
            println!("{}: {}", reply.addr, reply.value);
        }
    });

    log::info!("{} counter hosts running", options.count);

    let mut lines = tokio::io::AsyncBufReadExt::lines(tokio::io::BufReader::new(tokio::io::stdin()));
    prompt(true);
    loop {
        let raw_command = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                log::error!("Failed to read stdin: {}", e);
                break;
            }
        };

        match Command::parse(&raw_command) {
            Ok((destinators, command)) => {
                for destinator in destinators {
                    match command_senders.get(destinator) {
                        Some(sender) => {
                            if sender.send(command.clone()).await.is_err() {
                                log::warn!("counter-{} is not running anymore", destinator);
                            }
                        }
                        None => log::warn!("No counter host with ID {}", destinator),
                    }
                }
                prompt(true);
            }
            Err(e) => {
                eprintln!("{}", e);
                prompt(e.is_help());
            }
        }
    }
}
