mod contains_brute_force;

pub use contains_brute_force::contains_brute_force;
