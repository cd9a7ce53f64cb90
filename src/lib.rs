pub mod bench;
pub mod config;
pub mod engine_types;
pub mod memory;
pub mod output;
pub mod parallel_engine;
pub mod prime_pi_engine;
pub mod segment_sieve;
pub mod sequential_engine;
pub mod sieve_math;
pub mod tile;
pub mod verify;
pub mod work_queue;
