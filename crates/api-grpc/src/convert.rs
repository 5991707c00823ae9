//! Domain <-> wire conversions
//!
//! Every field is copied one-to-one; nothing is validated or defaulted here.

use crate::proto;
use contentservice_core::domain::{PutRequest, PutResponse, PutResult, RpcError};

impl From<proto::PutRequest> for PutRequest {
    fn from(msg: proto::PutRequest) -> Self {
        Self {
            contractor_id: msg.contractorid,
            order_number: msg.ordernumber,
            image_type: msg.imagetype,
            file_name: msg.filename,
            image_width: msg.imagewidth,
            image_height: msg.imageheight,
            release_date: msg.releasedate,
            dept_code: msg.deptcode,
            file_contents: msg.filecontents,
        }
    }
}

impl From<PutRequest> for proto::PutRequest {
    fn from(req: PutRequest) -> Self {
        Self {
            contractorid: req.contractor_id,
            ordernumber: req.order_number,
            imagetype: req.image_type,
            filename: req.file_name,
            imagewidth: req.image_width,
            imageheight: req.image_height,
            releasedate: req.release_date,
            deptcode: req.dept_code,
            filecontents: req.file_contents,
        }
    }
}

impl From<PutResult> for proto::JsonRpcResult {
    fn from(r: PutResult) -> Self {
        Self {
            id: r.id,
            contractorid: r.contractor_id,
            ordernumber: r.order_number,
            imagetype: r.image_type,
            imagewidth: r.image_width,
            imageheight: r.image_height,
            releasedate: r.release_date,
            scandate: r.scan_date,
            deptcode: r.dept_code,
            descprefix: r.desc_prefix,
            desctext: r.desc_text,
            category: r.category,
            archived: r.archived,
            datecreated: r.date_created,
            datemodefied: r.date_modified,
            filesize: r.file_size,
            imagefilename: r.image_file_name,
            thumbnailsize: r.thumbnail_size,
            webfilename: r.web_file_name,
        }
    }
}

impl From<proto::JsonRpcResult> for PutResult {
    fn from(m: proto::JsonRpcResult) -> Self {
        Self {
            id: m.id,
            contractor_id: m.contractorid,
            order_number: m.ordernumber,
            image_type: m.imagetype,
            image_width: m.imagewidth,
            image_height: m.imageheight,
            release_date: m.releasedate,
            scan_date: m.scandate,
            dept_code: m.deptcode,
            desc_prefix: m.descprefix,
            desc_text: m.desctext,
            category: m.category,
            archived: m.archived,
            date_created: m.datecreated,
            date_modified: m.datemodefied,
            file_size: m.filesize,
            image_file_name: m.imagefilename,
            thumbnail_size: m.thumbnailsize,
            web_file_name: m.webfilename,
        }
    }
}

impl From<RpcError> for proto::JsonRpcError {
    fn from(e: RpcError) -> Self {
        Self {
            code: e.code,
            message: e.message,
        }
    }
}

impl From<proto::JsonRpcError> for RpcError {
    fn from(m: proto::JsonRpcError) -> Self {
        Self {
            code: m.code,
            message: m.message,
        }
    }
}

impl From<PutResponse> for proto::PutResponse {
    fn from(resp: PutResponse) -> Self {
        Self {
            result: resp.result.map(Into::into),
            error: resp.error.map(Into::into),
        }
    }
}

impl From<proto::PutResponse> for PutResponse {
    fn from(msg: proto::PutResponse) -> Self {
        Self {
            result: msg.result.map(Into::into),
            error: msg.error.map(Into::into),
        }
    }
}
