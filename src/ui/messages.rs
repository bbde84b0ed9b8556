//! Console messages: the one place diagnostics are printed from.

use ansi_term::{Colour, Style};
use std::fmt;
use std::io::{self, Write};

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

fn tagged<T: fmt::Display>(colour: Colour, icon: &str, msg: T) -> String {
    format!("{} {}", colour.bold().paint(icon), msg)
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", tagged(Colour::Blue, ICON_INFO, msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", tagged(Colour::Green, ICON_OK, msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", tagged(Colour::Yellow, ICON_WARN, msg));
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", tagged(Colour::Red, ICON_ERR, msg));
}

// Varianti su writer esplicito, per la sessione interattiva.

pub fn write_info<W: Write + ?Sized, T: fmt::Display>(out: &mut W, msg: T) -> io::Result<()> {
    writeln!(out, "{}", tagged(Colour::Blue, ICON_INFO, msg))
}

pub fn write_warning<W: Write + ?Sized, T: fmt::Display>(out: &mut W, msg: T) -> io::Result<()> {
    writeln!(out, "{}", tagged(Colour::Yellow, ICON_WARN, msg))
}

pub fn write_error<W: Write + ?Sized, T: fmt::Display>(out: &mut W, msg: T) -> io::Result<()> {
    writeln!(out, "{}", tagged(Colour::Red, ICON_ERR, msg))
}

/// Section title as printed above each report.
pub fn header_line<T: fmt::Display>(msg: T) -> String {
    Style::new().bold().fg(Colour::Blue).paint(msg.to_string()).to_string()
}
