// Copyright (c) 2022  Mubelotix <mubelotix@gmail.com>
// Program licensed under GNU AGPL v3 or later. See the LICENSE file for details.

use crate::prelude::*;

/// A value emitted by a host in response to a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub addr: String,
    pub value: u64,
}

/// Exclusive owner of a single counter.
///
/// The counter is never shared: other tasks can only reach it by sending commands to [`run`].
pub struct CounterHost {
    pub addr: String,
    pub ll: LogLevel,
    counter: UInt64,
}

impl CounterHost {
    pub fn new(addr: String) -> CounterHost {
        CounterHost {
            addr,
            ll: LogLevel::default(),
            counter: UInt64::new(),
        }
    }

    pub fn counter(&self) -> &UInt64 {
        &self.counter
    }

    pub fn on_command(&mut self, c: Command) -> Option<u64> {
        trace!(self.ll, "{}: {:?}", self.addr, c);

        match c {
            Command::Inc => {
                let value = self.counter.increment();
                if value == 0 {
                    debug!(self.ll, "{}: counter wrapped around", self.addr);
                }
                Some(value)
            }
            Command::Get => Some(self.counter.value()),
            Command::Set { value } => {
                self.counter = value;
                Some(self.counter.value())
            }
            Command::Reset => {
                self.counter.reset();
                Some(0)
            }
            Command::SetLogLevel { level } => {
                self.ll.set(level);
                info!(self.ll, "{}: log level set to {}", self.addr, self.ll.load());
                None
            }
        }
    }
}

/// Serves commands until the command channel closes or nobody listens to replies anymore.
pub async fn run(mut host: CounterHost, command_receiver: CommandReceiver, reply_sender: Sender<Reply>) -> CounterHost {
    while let Some(command) = command_receiver.wait_command().await {
        if let Some(value) = host.on_command(command) {
            let reply = Reply { addr: host.addr.clone(), value };
            if reply_sender.send(reply).await.is_err() {
                warn!(host.ll, "{}: reply receiver dropped, stopping", host.addr);
                break;
            }
        }
    }

    debug!(host.ll, "{}: stopped at {}", host.addr, host.counter);
    host
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_on_command() {
        let mut host = CounterHost::new(String::from("counter-0"));
        assert_eq!(host.on_command(Command::Inc), Some(1));
        assert_eq!(host.on_command(Command::Inc), Some(2));
        assert_eq!(host.on_command(Command::Get), Some(2));
        assert_eq!(host.on_command(Command::Reset), Some(0));
        assert_eq!(host.on_command(Command::Inc), Some(1));

        assert_eq!(host.on_command(Command::Set { value: UInt64::with_value(u64::MAX) }), Some(u64::MAX));
        assert_eq!(host.on_command(Command::Inc), Some(0));
        assert_eq!(host.counter().value(), 0);

        assert_eq!(host.on_command(Command::SetLogLevel { level: 3 }), None);
        assert_eq!(host.ll.load(), 3);
    }
}
