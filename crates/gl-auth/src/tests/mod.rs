mod busy_guard;
mod error;
