pub mod adb;
pub mod backup;
pub mod console;
pub mod locator;
pub mod replace;
pub mod session;

#[cfg(test)]
mod test_support;
