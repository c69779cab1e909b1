use super::codec::CookieLine;
use super::CookieJar;
use crate::clock::Clock;
use crate::error::{KudosError, Result};
use std::cell::RefCell;

/// In-memory cookie jar for testing.
///
/// Behaves like a browser jar for a single path: assignments replace the
/// cookie with the same name, expired cookies disappear from the header, and
/// insertion order is kept.
pub struct MemoryJar<C: Clock> {
    clock: C,
    cookies: RefCell<Vec<CookieLine>>,
    lines: RefCell<Vec<String>>,
    simulate_write_error: RefCell<bool>,
}

impl<C: Clock> MemoryJar<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            cookies: RefCell::new(Vec::new()),
            lines: RefCell::new(Vec::new()),
            simulate_write_error: RefCell::new(false),
        }
    }

    /// Makes every subsequent write fail, like a browser with cookies disabled.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    /// The most recent accepted assignment line, verbatim.
    pub fn last_line(&self) -> Option<String> {
        self.lines.borrow().last().cloned()
    }

    /// Number of accepted assignments so far.
    pub fn write_count(&self) -> usize {
        self.lines.borrow().len()
    }

    /// Seeds a raw cookie, bypassing encoding. Useful for simulating values
    /// edited by hand or left by older versions.
    pub fn insert_raw(&self, name: &str, value: &str) {
        apply(&mut self.cookies.borrow_mut(), CookieLine::new(name, value), &self.clock);
    }
}

fn apply<C: Clock>(cookies: &mut Vec<CookieLine>, line: CookieLine, clock: &C) {
    let expired = line.is_expired_at(clock.now());
    match cookies.iter().position(|c| c.name == line.name) {
        Some(pos) if expired => {
            cookies.remove(pos);
        }
        Some(pos) => cookies[pos] = line,
        None if expired => {}
        None => cookies.push(line),
    }
}

impl<C: Clock> CookieJar for MemoryJar<C> {
    fn cookie_header(&self) -> Result<String> {
        let now = self.clock.now();
        let cookies = self.cookies.borrow();
        Ok(cookies
            .iter()
            .filter(|c| !c.is_expired_at(now))
            .map(|c| format!("{}={}", c.name, c.value))
            .collect::<Vec<_>>()
            .join("; "))
    }

    fn set_cookie(&self, line: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(KudosError::Store("Simulated write error".to_string()));
        }
        let parsed = CookieLine::parse(line)
            .ok_or_else(|| KudosError::Store(format!("Invalid cookie line: {}", line)))?;
        apply(&mut self.cookies.borrow_mut(), parsed, &self.clock);
        self.lines.borrow_mut().push(line.to_string());
        Ok(())
    }
}

// --- Test Fixtures ---
