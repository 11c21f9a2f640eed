pub(crate) mod company;
pub(crate) mod health;
