//! Kernel ABI mirror of `struct sg_io_hdr`, the v3 interface from
//! `scsi/sg.h`.

use libc::{c_int, c_uchar, c_uint, c_ushort, c_void};

/// One SG_IO request/response header.
///
/// Input fields are filled by the shim before submission; output fields by
/// the kernel on completion. Field order and widths must match the kernel
/// header exactly.
#[repr(C)]
#[derive(Debug)]
pub struct SgIoHdr {
    /// 'S' for the SCSI generic interface.
    pub interface_id: c_int,
    pub dxfer_direction: c_int,
    /// SCSI command length, <= 16 bytes in practice.
    pub cmd_len: c_uchar,
    /// Max bytes the kernel may write through `sbp`.
    pub mx_sb_len: c_uchar,
    /// 0 implies no scatter gather.
    pub iovec_count: c_ushort,
    pub dxfer_len: c_uint,
    pub dxferp: *mut c_void,
    pub cmdp: *const c_uchar,
    pub sbp: *mut c_uchar,
    /// Milliseconds.
    pub timeout: c_uint,
    pub flags: c_uint,
    pub pack_id: c_int,
    pub usr_ptr: *mut c_void,
    pub status: c_uchar,
    pub masked_status: c_uchar,
    pub msg_status: c_uchar,
    /// Sense bytes actually written through `sbp`.
    pub sb_len_wr: c_uchar,
    pub host_status: c_ushort,
    pub driver_status: c_ushort,
    /// `dxfer_len` minus bytes actually transferred.
    pub resid: c_int,
    /// Time taken by the command, milliseconds.
    pub duration: c_uint,
    pub info: c_uint,
}
