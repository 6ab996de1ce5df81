mod user;
mod utils;
