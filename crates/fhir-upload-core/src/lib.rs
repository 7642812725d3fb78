#![forbid(unsafe_code)]

//! Collects FHIR resource files, assembles them into a transaction Bundle and
//! submits the Bundle to a FHIR server in a single request.

pub mod bundle;
pub mod collect;
pub mod error;
pub mod load;
pub mod resource;
pub mod submit;

pub use bundle::{bundle_resources, Bundle, BundleEntry, BundleRequest, BundleType, HttpVerb};
pub use collect::{collect_files, default_scan_dir, resolve_inputs, DOCUMENT_EXTENSION};
pub use error::{Result, UploadError};
pub use load::load_resources;
pub use resource::Resource;
pub use submit::{
    build_client, load_and_submit, submit_bundle, SubmitResponse, UploadConfig, DEFAULT_TIMEOUT,
};
