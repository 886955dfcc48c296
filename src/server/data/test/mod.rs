mod account;
mod role;
