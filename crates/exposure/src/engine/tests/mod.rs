mod common;

mod aegis;
mod cases;
