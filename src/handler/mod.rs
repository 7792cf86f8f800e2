// Handler module entry point
// Static file serving for everything outside /api/

mod router;
mod static_files;

pub use router::handle_request;
