// Stored posts: read from the content store and graded with the SEO scorer.
// The service never writes posts; the admin panel owns that.

pub mod handlers;
pub mod repository;
