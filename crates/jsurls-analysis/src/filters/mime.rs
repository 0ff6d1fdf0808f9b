//! MIME types matched exactly by the junk filter.
//!
//! Types under the `application/`, `text/`, `image/`, `audio/`, `video/`,
//! `font/` and `multipart/` trees are caught by prefix; this list covers the
//! registered and de facto types outside those trees that show up in bundles.

pub static MIME_TYPES: &[&str] = &[
    "message/rfc822",
    "message/http",
    "message/partial",
    "message/global",
    "message/delivery-status",
    "message/disposition-notification",
    "message/external-body",
    "message/imdn+xml",
    "message/sip",
    "model/gltf+json",
    "model/gltf-binary",
    "model/iges",
    "model/mesh",
    "model/mtl",
    "model/obj",
    "model/stl",
    "model/step",
    "model/vnd.usdz+zip",
    "model/vrml",
    "model/x3d+xml",
    "model/x3d-vrml",
    "haptics/ivs",
    "haptics/hjif",
    "haptics/hmpg",
    "chemical/x-cdx",
    "chemical/x-cif",
    "chemical/x-pdb",
    "chemical/x-xyz",
    "x-conference/x-cooltalk",
    "x-shader/x-vertex",
    "x-shader/x-fragment",
    "x-world/x-vrml",
    "drawing/x-dwf",
    "paleovu/x-pv",
    "www/mime",
    "xgl/drw",
    "xgl/movie",
    "i-world/i-vrml",
];
