use std::io;
use std::path::PathBuf;

use sitebake::error::{Error, RegistrationKind};

#[test]
fn test_error_display() {
    let err = Error::DuplicateRegistration {
        kind: RegistrationKind::Exact,
        key: "projects.html".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Duplicate context registration for template 'projects.html'"
    );

    let err = Error::DuplicateRegistration {
        kind: RegistrationKind::Pattern,
        key: "^.+html$".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Duplicate context registration for templates matching '^.+html$'"
    );

    let err = Error::TemplateNotFound { template: "index.html".to_string() };
    assert_eq!(err.to_string(), "Template 'index.html' not found");
}

#[test]
fn test_write_error_names_template_and_path() {
    let err = Error::DestinationWriteError {
        template: "blog/post.html".to_string(),
        path: PathBuf::from("out/blog/post.html"),
        source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
    };
    assert_eq!(
        err.to_string(),
        "Failed to write 'out/blog/post.html' for template 'blog/post.html': denied"
    );
}
