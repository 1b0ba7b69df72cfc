use gst::MessageView;

const ERRS_WARNS: [gst::MessageType; 2] = [gst::MessageType::Error, gst::MessageType::Warning];

/// The error and warning messages taken off a bus, kept apart so that only
/// errors need to be treated as fatal
#[derive(Debug, Default)]
pub struct BusMessages {
    pub errors: Vec<glib::Error>,
    pub warnings: Vec<glib::Error>,
}

impl BusMessages {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }
}

/// Drain all error and warning messages from the bus.
/// (This prevents messages piling up and causing memory leaks)
pub fn get_bus_messages(bus: &gst::Bus) -> BusMessages {
    let mut messages = BusMessages::default();

    while let Some(msg) = bus.pop_filtered(&ERRS_WARNS) {
        match msg.view() {
            MessageView::Error(e) => messages.errors.push(e.error()),
            MessageView::Warning(w) => messages.warnings.push(w.error()),
            _ => {}
        }
    }

    messages
}

#[cfg(test)]
mod tests {
    use super::*;

    fn warning(text: &str) -> gst::Message {
        gst::message::Warning::builder(gst::CoreError::Failed, text).build()
    }

    #[test]
    fn warnings_kept_apart() {
        crate::initialize().expect("GStreamer initialises");

        let bus = gst::Bus::new();
        bus.post(warning("buffers are being dropped")).unwrap();
        bus.post(
            gst::message::Error::builder(gst::ResourceError::OpenRead, "connection refused")
                .build(),
        )
        .unwrap();
        bus.post(warning("clock skew")).unwrap();

        let messages = get_bus_messages(&bus);
        assert_eq!(messages.errors.len(), 1);
        assert!(messages.errors[0].matches(gst::ResourceError::OpenRead));
        assert_eq!(
            messages
                .warnings
                .iter()
                .map(|w| w.message().to_string())
                .collect::<Vec<_>>(),
            vec!["buffers are being dropped", "clock skew"]
        );

        assert!(get_bus_messages(&bus).is_empty(), "The bus has been drained");
    }

    #[test]
    fn warnings_alone_are_not_errors() {
        crate::initialize().expect("GStreamer initialises");

        let bus = gst::Bus::new();
        bus.post(warning("buffers are being dropped")).unwrap();

        let messages = get_bus_messages(&bus);
        assert!(messages.errors.is_empty());
        assert_eq!(messages.warnings.len(), 1);
    }
}
