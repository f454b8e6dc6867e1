//! 콘솔 리포터 포트 구현 어댑터.

use std::io::{self, IsTerminal};

use crossterm::style::Stylize;

use crate::application::ports::Reporter;
use crate::domain::diff::FieldDiff;

/// 콘솔 전용 리포터 어댑터.
pub struct ConsoleReporter {
    interactive: bool,
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleReporter {
    /// stdout이 TTY일 때만 색상을 사용한다.
    pub fn new() -> Self {
        Self {
            interactive: io::stdout().is_terminal(),
        }
    }
}

impl Reporter for ConsoleReporter {
    fn section(&self, name: &str) {
        println!();
        if self.interactive {
            println!("==================== {} ====================", name.bold());
        } else {
            println!("==================== {} ====================", name);
        }
    }

    fn kv(&self, key: &str, value: &str) {
        println!("{:<12}: {}", key, value);
    }

    fn status(&self, scope: &str, message: &str) {
        println!("[{:<8}] {}", scope, message);
    }

    fn change(&self, diff: &FieldDiff) {
        let old = diff.ours_text();
        let new = diff.theirs_text();
        if self.interactive {
            println!("\t{}: {} -> {}", diff.key, old.red(), new.green());
        } else {
            println!("\t{}: {} -> {}", diff.key, old, new);
        }
    }

    fn raw(&self, line: &str) {
        println!("{}", line);
    }
}
