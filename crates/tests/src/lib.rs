#[cfg(test)]
mod common;

#[cfg(test)]
mod search_movies_tests;

#[cfg(test)]
mod catalog_failure_tests;

#[cfg(test)]
mod health_tests;
