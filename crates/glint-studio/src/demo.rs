use std::collections::BTreeMap;

use glint_ui::prelude::*;

const SAMPLE_TEXT: &str = "This is a sample text it has exactly 229 characters and it is quite long. \
It also has auto wrapping and that's pretty amazing ! This feature took me almost 14 hours to \
develop and optimize ...    but it finally works as intended !";

/// Hooks of the main demo panel: mirrors the dragger position into the
/// status line.
#[derive(Debug, Default)]
pub struct DemoInterface {
    last: Option<Vec2>,
}

impl InterfaceHooks for DemoInterface {
    fn update(&mut self, elements: &mut BTreeMap<String, UiElement>, _elapsed: f64) {
        let Some(pos) = elements.get("db").map(|db| db.properties().position()) else {
            return;
        };
        if self.last == Some(pos) {
            return;
        }
        self.last = Some(pos);

        if let Some(text) = elements.get_mut("status").and_then(UiElement::text_model_mut) {
            text.set_text(format!("handle at {:.0}, {:.0}", pos.x, pos.y));
        }
    }

    fn on_property_change(&mut self, key: PropertyKey, value: &PropertyValue) {
        log::debug!("demo panel {key} -> {value:?}");
    }
}

/// Registers the demo panel: a dragger, a wrapped text block and a 4x4 grid
/// of buttons. The panel is shown.
pub fn build_demo(manager: &mut InterfaceManager) -> InterfaceId {
    let id = manager.add("demo", DemoInterface::default());
    let Some(ui) = manager.get_mut(id) else {
        return id;
    };

    ui.properties_mut()
        .set_background_color(ColorRgba::new(198.0 / 255.0, 223.0 / 255.0, 250.0 / 255.0, 0.75))
        .set_corner_radius(10.0)
        .set_size(640.0, 480.0)
        .set_position(50.0, 100.0);

    let dragger = widgets::dragger().with_properties(|p| {
        p.set_background_color(ColorRgba::new(1.0, 0.0, 0.0, 0.75))
            .set_size(50.0, 50.0)
            .set_position(295.0, 370.0)
            .set_corner_radius(25.0);
    });
    ui.add_element("db", dragger);

    let sample = widgets::text_label(SAMPLE_TEXT).with_properties(|p| {
        p.set_size(600.0, 200.0)
            .set_font_size(16.0)
            .set_position(20.0, 20.0)
            .set_font_color(ColorRgba::new(0.2, 0.2, 0.2, 1.0))
            .set_font_family("Calibri");
    });
    ui.add_element("text", sample);

    let status = widgets::text_label("").with_properties(|p| {
        p.set_size(300.0, 20.0).set_position(20.0, 440.0).set_font_size(14.0);
    });
    ui.add_element("status", status);

    for j in 0..4 {
        for i in 0..4 {
            let name = format!("Button_{j}_{i}");
            let label = name.clone();
            let button = widgets::button("Button", move |_| log::info!("{label} clicked !"))
                .with_properties(|p| {
                    p.set_background_color(ColorRgba::white())
                        .set_size(85.0, 30.0)
                        .set_position(40.0 + 160.0 * i as f32, 85.0 + 75.0 * j as f32)
                        .set_font_color(ColorRgba::new(1.0, 0.0, 0.0, 1.0))
                        .set_border_width(3.0)
                        .set_font_size(24.0)
                        .set_corner_radius(5.0);
                });
            ui.add_element(name, button);
        }
    }

    manager.show(id);
    id
}

/// Registers a popup with a close button and a launcher with an open
/// button. Only the launcher starts visible.
pub fn build_popup_pair(manager: &mut InterfaceManager) -> (InterfaceId, InterfaceId) {
    let commands = manager.commands();
    let popup = manager.add("UI_1", ());
    let launcher = manager.add("UI_2", ());

    if let Some(ui) = manager.get_mut(popup) {
        ui.properties_mut()
            .set_background_color(ColorRgba::new(1.0, 1.0, 0.0, 0.5))
            .set_size(300.0, 200.0)
            .set_position(50.0, 50.0);

        let hide = commands.clone();
        let close = widgets::button("Close", move |_| hide.hide(popup)).with_properties(|p| {
            p.set_background_color(ColorRgba::new(1.0, 0.0, 0.0, 1.0))
                .set_size(30.0, 30.0)
                .set_position(265.0, 5.0);
        });
        ui.add_element("Button1", close);
    }

    if let Some(ui) = manager.get_mut(launcher) {
        ui.properties_mut()
            .set_background_color(ColorRgba::new(1.0, 1.0, 1.0, 0.5))
            .set_size(100.0, 50.0)
            .set_position(450.0, 50.0);

        let open = widgets::button("Open", move |_| commands.show(popup)).with_properties(|p| {
            p.set_background_color(ColorRgba::new(1.0, 0.0, 1.0, 1.0))
                .set_size(80.0, 30.0)
                .set_position(10.0, 10.0);
        });
        ui.add_element("Button2", open);
    }

    manager.show(launcher);
    (popup, launcher)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_panel_layout() {
        let mut manager = InterfaceManager::new(UiContext::headless(1280, 960));
        let id = build_demo(&mut manager);
        let ui = manager.get(id).expect("demo panel");

        assert!(ui.is_visible());
        assert_eq!(ui.elements().count(), 19);
        assert_eq!(ui.target_size(), Some((640, 480)));
        assert_eq!(
            ui.element("Button_3_3").map(|b| b.properties().position()),
            Some(Vec2::new(520.0, 310.0))
        );
    }

    #[test]
    fn dragging_the_handle_updates_the_status_line() {
        let mut manager = InterfaceManager::new(UiContext::headless(1280, 960));
        let id = build_demo(&mut manager);

        // Handle center in window space: panel (50, 100) + (320, 395).
        manager.propagate_pointer(Vec2::new(370.0, 495.0), true);
        manager.propagate_pointer(Vec2::new(380.0, 485.0), true);
        manager.update(0.016);

        let ui = manager.get(id).expect("demo panel");
        let status = ui.element("status").and_then(UiElement::text_model).map(TextModel::text);
        assert_eq!(status, Some("handle at 305, 360"));
    }

    #[test]
    fn open_and_close_buttons_drive_the_popup() {
        let mut manager = InterfaceManager::new(UiContext::headless(1280, 960));
        let (popup, _) = build_popup_pair(&mut manager);
        let visible = |m: &InterfaceManager| m.get(popup).is_some_and(UserInterface::is_visible);
        assert!(!visible(&manager));

        manager.propagate_pointer(Vec2::new(500.0, 75.0), true);
        manager.propagate_pointer(Vec2::new(500.0, 75.0), false);
        assert!(visible(&manager));

        // Moving over with the button up hands control to the popup.
        manager.propagate_pointer(Vec2::new(330.0, 70.0), false);
        assert!(manager.mouse().has_control(popup));
        manager.propagate_pointer(Vec2::new(330.0, 70.0), true);
        manager.propagate_pointer(Vec2::new(330.0, 70.0), false);
        assert!(!visible(&manager));
    }
}
