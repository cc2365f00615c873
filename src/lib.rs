//! Canvas engine for a slide editor.
//!
//! Media elements (images and videos) live on a fixed 1200 x 675 logical
//! canvas. The host renders that canvas into a preview of whatever size fits
//! its layout and forwards raw pointer events; this crate maps them onto the
//! canvas, runs the drag / resize / rotate gestures, snaps to the grid, keeps
//! every element inside the canvas, and hands back new [`doc::Slide`] values
//! through [`engine::Action`]s. It also owns the session's ephemeral media
//! handles and makes sure none outlive the session.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Host-facing [`engine::EditorCore`] and its [`engine::Action`]s |
//! | [`doc`] | Slide and media element types |
//! | [`mapper`] | Device / preview / logical coordinate conversion |
//! | [`snap`] | Grid snapping |
//! | [`repo`] | Add, update, remove and duplicate elements |
//! | [`zorder`] | Bring to front / send to back |
//! | [`align`] | Canvas-relative alignment |
//! | [`lock`] | Locked element registry |
//! | [`input`] | Gesture records |
//! | [`gesture`] | One-gesture-at-a-time state machine |
//! | [`drag`] | Drag rules |
//! | [`resize`] | Eight-handle resize rules |
//! | [`rotate`] | Rotation about the element centre |
//! | [`hit`] | Hit-testing elements and handles |
//! | [`media`] | Ephemeral media handle lifetime |
//! | [`library`] | Session media library |
//! | [`config`] | Editor configuration |
//! | [`error`] | Error taxonomy |
//! | [`consts`] | Canvas size, minimum sizes, defaults |

pub mod align;
pub mod config;
pub mod consts;
pub mod doc;
pub mod drag;
pub mod engine;
pub mod error;
pub mod gesture;
pub mod hit;
pub mod input;
pub mod library;
pub mod lock;
pub mod mapper;
pub mod media;
pub mod repo;
pub mod resize;
pub mod rotate;
pub mod snap;
pub mod zorder;
