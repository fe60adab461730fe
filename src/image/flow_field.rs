use crate::image::FloatGrid;

#[derive(Debug,Clone,PartialEq)]
pub struct FlowField {
    pub flow_x: FloatGrid,
    pub flow_y: FloatGrid
}

impl FlowField {

    pub fn new(flow_x: FloatGrid, flow_y: FloatGrid) -> Option<FlowField> {
        match flow_x.width() == flow_y.width() && flow_x.height() == flow_y.height() {
            true => Some(FlowField { flow_x, flow_y }),
            false => None
        }
    }

    pub fn width(&self) -> usize {
        self.flow_x.width()
    }

    pub fn height(&self) -> usize {
        self.flow_x.height()
    }

    pub fn vector(&self, row: usize, col: usize) -> (f32,f32) {
        (self.flow_x.get(row,col), self.flow_y.get(row,col))
    }

    pub fn max_norm(&self) -> f32 {
        let mut max_norm = 0.0f32;
        for r in 0..self.height() {
            for c in 0..self.width() {
                let (x,y) = self.vector(r,c);
                max_norm = max_norm.max((x*x + y*y).sqrt());
            }
        }
        max_norm
    }
}
