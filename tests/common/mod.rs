// Copyright (c) 2022  Mubelotix <mubelotix@gmail.com>
// Program licensed under GNU AGPL v3 or later. See the LICENSE file for details.

#[allow(unused_imports)]
pub use counter::prelude::*;
pub use tokio::task::JoinHandle;

pub struct Hosts {
    pub command_senders: Vec<Sender<Command>>,
    pub replies: Receiver<Reply>,
    pub handles: Vec<JoinHandle<CounterHost>>,
}

impl Hosts {
    /// Parses `line` and forwards the command to every destinator.
    pub async fn send(&self, line: &str) {
        let (destinators, command) = Command::parse(line).unwrap();
        for destinator in destinators {
            self.command_senders[destinator].send(command.clone()).await.unwrap();
        }
    }

    pub async fn reply(&self) -> Reply {
        tokio::time::timeout(std::time::Duration::from_secs(5), self.replies.recv()).await.unwrap().unwrap()
    }

    /// Closes command channels and waits for every host to stop.
    pub async fn shutdown(self) -> Vec<CounterHost> {
        drop(self.command_senders);
        let mut hosts = Vec::new();
        for handle in self.handles {
            hosts.push(handle.await.unwrap());
        }
        hosts
    }
}

pub fn launch_hosts(host_count: usize) -> Hosts {
    let _ = env_logger::builder().is_test(true).try_init();

    let (reply_sender, replies) = async_channel::unbounded();
    let mut command_senders = Vec::new();
    let mut handles = Vec::new();
    for i in 0..host_count {
        let (command_receiver, command_sender) = CommandReceiver::new();
        command_senders.push(command_sender);
        handles.push(tokio::spawn(run(CounterHost::new(format!("counter-{}", i)), command_receiver, reply_sender.clone())));
    }

    Hosts { command_senders, replies, handles }
}
