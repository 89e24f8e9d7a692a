//! Flutter bridge for the VoiceTask core.

pub mod api;
