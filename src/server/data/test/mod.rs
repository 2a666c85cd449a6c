mod admin;
mod billing;
mod content;
mod counseling;
mod emotion;
mod quiz;
mod schedule;
mod user;
