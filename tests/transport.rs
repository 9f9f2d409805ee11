//! SG_IO against a descriptor that is not an sg device must surface a
//! transport-level error, never a SCSI-level one.

#![cfg(target_os = "linux")]

use rust_sg::{ScsiShim, SgError};

const INQUIRY: [u8; 6] = [0x12, 0, 0, 0, 96, 0];

#[test]
fn sg_io_on_regular_file_is_a_transport_error() {
    let file = tempfile::tempfile().unwrap();
    let shim = ScsiShim::new();

    let err = shim.read_to_vec(&file, &INQUIRY, 96).unwrap_err();
    match err {
        SgError::Transport(e) => assert!(e.raw_os_error().is_some()),
        other => panic!("expected transport error, got {other:?}"),
    }
}

#[test]
fn write_on_regular_file_is_a_transport_error() {
    let file = tempfile::tempfile().unwrap();
    let shim = ScsiShim::new();

    let err = shim.write(&file, &[0u8; 6], None).unwrap_err();
    assert!(matches!(err, SgError::Transport(_)));
}
