mod common;
mod launch;
