//! Pulls from the render surface.

use cardgrid_core::{ControlBridge, PageInfo, SurfaceFrame};

/// Page info and frame pulled together.
///
/// `frame` is `None` only when the surface is gone; `page` is also `None`
/// while the surface shows no grid.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceSnapshot {
    pub page: Option<PageInfo>,
    pub frame: Option<SurfaceFrame>,
}

/// Pull right away. Pulls queue behind earlier pushes, so this sees their
/// effect when the push only touches the current page.
pub async fn snapshot(bridge: ControlBridge) -> SurfaceSnapshot {
    let page = bridge.page_info().await;
    let frame = bridge.frame().await;
    SurfaceSnapshot { page, frame }
}

/// Wait for the settle delay, then pull.
pub async fn settled_snapshot(bridge: ControlBridge) -> SurfaceSnapshot {
    let page = bridge.settled_page_info().await;
    let frame = bridge.frame().await;
    SurfaceSnapshot { page, frame }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardgrid_core::{CardItem, CardStore, RenderSurface};

    #[tokio::test]
    async fn test_snapshot_after_load() {
        let bridge = ControlBridge::spawn(RenderSurface::default());
        bridge.load(CardStore::from_items(vec![CardItem::new("Q", "A")]));

        let snapshot = settled_snapshot(bridge).await;
        assert_eq!(snapshot.page, Some(PageInfo { page: 1, page_count: 1 }));
        assert!(matches!(snapshot.frame, Some(SurfaceFrame::Grid(_))));
    }

    #[tokio::test]
    async fn test_snapshot_of_message() {
        let bridge = ControlBridge::spawn(RenderSurface::default());
        bridge.show_message("No collection or no deck selected.");

        let snapshot = snapshot(bridge).await;
        assert_eq!(snapshot.page, None);
        assert_eq!(
            snapshot.frame,
            Some(SurfaceFrame::Message(
                "No collection or no deck selected.".to_string()
            ))
        );
    }

    #[tokio::test]
    async fn test_snapshot_of_gone_surface() {
        let snapshot = snapshot(ControlBridge::disconnected()).await;
        assert_eq!(snapshot, SurfaceSnapshot { page: None, frame: None });
    }
}
