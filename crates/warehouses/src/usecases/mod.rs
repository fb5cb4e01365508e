//! Rule procedures behind the exposed warehouse operations.
//!
//! Each use case is stateless apart from its injected ports: it reads through
//! the ports, checks its preconditions in order (first violation wins) and only
//! writes once every precondition has passed.

mod archive;
mod create;
mod replace;

pub use archive::ArchiveWarehouseUseCase;
pub use create::CreateWarehouseUseCase;
pub use replace::ReplaceWarehouseUseCase;
