mod config;
mod determinism;
mod dynamics;
mod end_to_end;
