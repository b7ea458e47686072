//! Cross-crate tests exercising the compiler, the match engine and the
//! session together.

#[cfg(test)]
mod matching;
#[cfg(test)]
mod session;
