//! Progress display module
//!
//! Provides styled terminal output, a progress bar, and run statistics.

use bytesize::ByteSize;
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

/// Print the application banner
pub fn print_banner() {
    let banner = r#"
╔══════════════════════════════════════════════════════════╗
║                                                          ║
║   ██╗    ██╗ ██████╗ ██████╗ ██████╗                     ║
║   ██║    ██║██╔═══██╗██╔══██╗██╔══██╗                    ║
║   ██║ █╗ ██║██║   ██║██████╔╝██║  ██║                    ║
║   ██║███╗██║██║   ██║██╔══██╗██║  ██║                    ║
║   ╚███╔███╔╝╚██████╔╝██║  ██║██████╔╝                    ║
║    ╚══╝╚══╝  ╚═════╝ ╚═╝  ╚═╝╚═════╝                     ║
║                                                          ║
║   ███████╗██╗███████╗██╗   ██╗███████╗                   ║
║   ██╔════╝██║██╔════╝██║   ██║██╔════╝                   ║
║   ███████╗██║█████╗  ██║   ██║█████╗                     ║
║   ╚════██║██║██╔══╝  ╚██╗ ██╔╝██╔══╝                     ║
║   ███████║██║███████╗ ╚████╔╝ ███████╗                   ║
║   ╚══════╝╚═╝╚══════╝  ╚═══╝  ╚══════╝                   ║
║                                                          ║
║              Word List Cleanup and Normalization          ║
║                                              v1.0.0      ║
╚══════════════════════════════════════════════════════════╝
"#;

    println!("{}", banner.green());
}

/// Print a section header
pub fn print_header(text: &str) {
    println!("\n{} {}", "▶".green(), text.green().bold());
}

/// Print an info message
pub fn print_info(text: &str) {
    println!("  {} {}", "ℹ".cyan(), text);
}

/// Print a success message
pub fn print_success(text: &str) {
    println!("  {} {}", "✔".green(), text.green());
}

/// Print a warning message
pub fn print_warning(text: &str) {
    println!("  {} {}", "⚠".yellow(), text.yellow());
}

/// Print an error message
pub fn print_error(text: &str) {
    eprintln!("  {} {}", "✖".red(), text.red());
}

/// Print a bullet point
pub fn print_bullet(text: &str) {
    println!("  {} {}", "•".green(), text);
}

/// Create a bytes-based progress bar
pub fn create_bytes_progress_bar(total_bytes: u64, msg: &str) -> ProgressBar {
    let pb = ProgressBar::new(total_bytes);

    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.green/dim}] {bytes}/{total_bytes} ({bytes_per_sec}) {msg}")
            .unwrap()
            .progress_chars("█▓░")
    );

    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));

    pb
}

/// Counters for a single sieve pass.
#[derive(Debug)]
pub struct FilterStats {
    pub lines_read: u64,
    pub bytes_read: u64,
    pub kept: u64,
    pub too_short: u64,
    pub not_alphabetic: u64,
    start_time: Instant,
}

impl FilterStats {
    pub fn new() -> Self {
        Self {
            lines_read: 0,
            bytes_read: 0,
            kept: 0,
            too_short: 0,
            not_alphabetic: 0,
            start_time: Instant::now(),
        }
    }

    pub fn add_line(&mut self, bytes: u64) {
        self.lines_read += 1;
        self.bytes_read += bytes;
    }

    pub fn add_kept(&mut self) {
        self.kept += 1;
    }

    pub fn add_too_short(&mut self) {
        self.too_short += 1;
    }

    pub fn add_not_alphabetic(&mut self) {
        self.not_alphabetic += 1;
    }

    pub fn rejected(&self) -> u64 {
        self.too_short + self.not_alphabetic
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    pub fn lines_per_second(&self) -> f64 {
        let elapsed = self.elapsed().as_secs_f64();
        if elapsed > 0.0 {
            self.lines_read as f64 / elapsed
        } else {
            0.0
        }
    }

    /// Print final statistics
    pub fn print_summary(&self) {
        println!();
        println!("{}", "═".repeat(60).green());
        println!("{}", "                      SIEVE COMPLETE".green().bold());
        println!("{}", "═".repeat(60).green());
        println!();

        println!(
            "  {} {} ({})",
            "Lines read:     ".green(),
            format_number(self.lines_read),
            ByteSize(self.bytes_read)
        );
        println!(
            "  {} {}",
            "Too short:      ".yellow(),
            format_number(self.too_short)
        );
        println!(
            "  {} {}",
            "Not alphabetic: ".yellow(),
            format_number(self.not_alphabetic)
        );
        println!(
            "  {} {}",
            "Words kept:     ".green().bold(),
            format_number(self.kept)
        );

        println!();
        println!(
            "  {} {}",
            "Duration:       ".green(),
            format_duration(self.elapsed())
        );
        println!(
            "  {} {:.2} lines/sec",
            "Throughput:     ".green(),
            self.lines_per_second()
        );
        println!();
        println!("{}", "═".repeat(60).green());
    }
}

impl Default for FilterStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Format a number with thousand separators
fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    let chars: Vec<char> = s.chars().collect();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(*c);
    }

    result
}

/// Format duration as human-readable string
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();

    if secs < 60 {
        format!("{:.1}s", duration.as_secs_f64())
    } else if secs < 3600 {
        let mins = secs / 60;
        let secs = secs % 60;
        format!("{}m {}s", mins, secs)
    } else {
        let hours = secs / 3600;
        let mins = (secs % 3600) / 60;
        format!("{}h {}m", hours, mins)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(123), "123");
        assert_eq!(format_number(1234), "1,234");
        assert_eq!(format_number(1234567), "1,234,567");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_secs(30)), "30.0s");
        assert_eq!(format_duration(Duration::from_secs(90)), "1m 30s");
        assert_eq!(format_duration(Duration::from_secs(3661)), "1h 1m");
    }

    #[test]
    fn test_stats_counters() {
        let mut stats = FilterStats::new();

        stats.add_line(4);
        stats.add_line(2);
        stats.add_line(5);
        stats.add_kept();
        stats.add_too_short();
        stats.add_not_alphabetic();

        assert_eq!(stats.lines_read, 3);
        assert_eq!(stats.bytes_read, 11);
        assert_eq!(stats.kept, 1);
        assert_eq!(stats.rejected(), 2);
    }
}
