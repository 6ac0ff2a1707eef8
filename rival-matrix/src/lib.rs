//! # rival-matrix
//!
//! The mutable matrix aggregate: one hypothesis set × one evidence set ×
//! a sparse rating map, owned by exactly one logical session at a time.
//!
//! Mutators reject-before-mutate: any operation referencing an unknown id
//! fails without touching the matrix. Removing a hypothesis or evidence
//! item cascade-deletes its ratings atomically. Reads hand out immutable
//! [`MatrixSnapshot`](rival_core::MatrixSnapshot) values that later
//! mutations never retroactively alter.
//!
//! The crate holds no persistence and no locking — callers serialize
//! mutations per matrix.

pub mod matrix;

pub use matrix::Matrix;
