#[cfg(test)]
pub mod common;

#[cfg(test)]
mod test_known_values;
