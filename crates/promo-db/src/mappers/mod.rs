//! Model → entity mappers

mod promo;
