use core::fmt::Display;

use log::debug;

/// A listening socket as reported by `ss -tuln`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListeningSocket {
    pub proto: String,
    pub port: String,
    pub state: String,
}

impl Display for ListeningSocket {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:<4} {:<6} {}", self.proto, self.port, self.state)
    }
}

impl ListeningSocket {
    pub fn parse(line: &str) -> Option<ListeningSocket> {
        let splits: Vec<&str> = line.split_whitespace().collect();
        if splits.len() < 5 {
            return None;
        }

        let local = splits[4];
        let (_, port) = local.rsplit_once(':')?;

        Some(ListeningSocket {
            proto: splits[0].to_string(),
            port: port.to_string(),
            state: splits[1].to_string(),
        })
    }
}

/// Parses the whole `ss` output, skipping its header line.
pub fn parse_listening_sockets(output: &str) -> Vec<ListeningSocket> {
    let mut lines = output.split('\n');
    lines.next();

    lines
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| {
            let socket = ListeningSocket::parse(line);
            if socket.is_none() {
                debug!("skipping socket line {:?}", line);
            }
            socket
        })
        .collect()
}
