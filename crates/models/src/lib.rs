pub mod errors;
pub mod db;
pub mod user;
pub mod snippet;

#[cfg(test)]
mod tests;
