mod admin;
mod claim;
mod item;
mod user;
