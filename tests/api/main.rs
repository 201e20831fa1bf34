mod helpers;

mod flow;
mod jwks;
mod user_data;
