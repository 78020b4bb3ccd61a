use core::fmt::Display;
use std::sync::LazyLock;

use log::debug;
use regex::Regex;

/// Number of banner lines `ufw status numbered` prints before the rules.
pub const STATUS_HEADER_LINES: usize = 4;

static RULE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*\[\s*(\d+)\]\s+(.+?)\s+(ALLOW|DENY|REJECT)\s+(IN|OUT)\s+(.+)$")
        .expect("rule pattern is valid")
});

#[derive(Debug, Copy, Clone, PartialEq, Eq, strum::AsRefStr, strum::EnumString)]
#[strum(serialize_all = "UPPERCASE")]
pub enum RuleAction {
    Allow,
    Deny,
    Reject,
}

/// A single entry of `ufw status numbered`.
///
/// `num` is the ordinal printed by ufw. It is renumbered by ufw after every
/// insertion or deletion, so a rule list is only valid until the next
/// mutating call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub num: String,
    pub to: String,
    pub action: RuleAction,
    pub from: String,
}

impl Display for Rule {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{:>3} {:<6} {:<20} from {}",
            self.num,
            self.action.as_ref(),
            self.to,
            self.from
        )
    }
}

impl Rule {
    /// Parses one line of the numbered status listing, e.g.
    /// `[ 1] 22/tcp                     ALLOW IN    Anywhere`.
    pub fn parse(line: &str) -> Option<Rule> {
        let line = line.trim();
        if line.is_empty() || !line.contains('[') || !line.contains(']') {
            return None;
        }

        let caps = RULE_LINE.captures(line)?;
        let action = caps[3].parse::<RuleAction>().ok()?;

        Some(Rule {
            num: caps[1].to_string(),
            to: format!("{} {}", &caps[2], &caps[4]),
            action,
            from: caps[5].to_string(),
        })
    }
}

pub fn parse_status_numbered(output: &str) -> Vec<Rule> {
    output
        .split('\n')
        .skip(STATUS_HEADER_LINES)
        .filter_map(|line| {
            let rule = Rule::parse(line);
            if rule.is_none() && !line.trim().is_empty() {
                debug!("skipping status line {:?}", line);
            }
            rule
        })
        .collect()
}
