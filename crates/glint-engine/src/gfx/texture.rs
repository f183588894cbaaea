/// An image resource owned outside the UI (loaded, uploaded and freed by the
/// asset layer). The UI only needs to know whether one is present and how
/// big it is.
pub trait TextureHandle {
    fn bind(&self);
    fn unbind(&self);
    fn id(&self) -> u32;
    fn width(&self) -> u32;
    fn height(&self) -> u32;
}
