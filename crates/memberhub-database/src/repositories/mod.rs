//! Concrete repository implementations.

pub mod member;

pub use member::MemberRepository;
